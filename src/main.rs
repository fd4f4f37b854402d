// ボタン (PA0) を押している間だけ LED (PC13) を点灯
// PAC も HAL も使わず、レジスタのアドレスを直接叩くサンプル

#![no_std]
#![no_main]

// pick a panicking behavior
use panic_halt as _; // you can put a breakpoint on `rust_begin_unwind` to catch panics
                     // use panic_semihosting as _; // logs messages to the host stderr; requires a debugger

// cortex-m コア向けのスタートアップ処理を提供
// メモリの初期化から例外テーブルのシンボル登録（リセット以外はダミーの定義）まで実施してくれる。
use cortex_m_rt::entry;

#[cfg(feature = "semihosting")]
use cortex_m_semihosting::hprintln;

// ペリフェラルは触らないが、割り込みベクタテーブルのシンボル定義のためにリンクする。
use stm32f4::stm32f411 as _;

use stm32f411_button_led::config::{BUTTON, LED};
use stm32f411_button_led::reg::Mmio;
use stm32f411_button_led::{ButtonLed, Gpio, Rcc};

#[entry]
fn main() -> ! {
    // semihosting はデバッガ無しだと HardFault で止まるので feature を付けたときだけ
    #[cfg(feature = "semihosting")]
    {
        hprintln!("button {:?} -> led {:?}", BUTTON, LED).ok();
    }

    // レジスタの所有者はここだけ
    let (rcc, gpioa, gpioc) = unsafe {
        (
            Rcc::<Mmio>::take(),
            Gpio::<Mmio>::take(BUTTON.port()),
            Gpio::<Mmio>::take(LED.port()),
        )
    };

    let board = ButtonLed::init(&rcc, gpioa, gpioc);
    board.run()
}
