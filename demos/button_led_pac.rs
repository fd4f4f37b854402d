// ボタン (PA0) を押している間だけ LED (PC13) を点灯
// PAC (stm32f4 クレート) 版。やっていることは src/main.rs と同じ

#![no_std]
#![no_main]

// pick a panicking behavior
use panic_halt as _; // you can put a breakpoint on `rust_begin_unwind` to catch panics

// cortex-m コア向けのスタートアップ処理を提供
use cortex_m_rt::entry;

// このデバイスクレートをuseすることで、割り込みベクタテーブルのシンボル定義が自動登録される。
use stm32f4::stm32f411;

use stm32f411_button_led::{led_level_for, Level};

#[entry]
fn main() -> ! {
    // write は対象レジスタを全部書き換えるので注意
    // bitごとに書き換えたければ、modify
    let peripheral = stm32f411::Peripherals::take().unwrap();

    // 各機能へのクロック入力設定 (GPIOA: ボタン, GPIOC: LED)
    peripheral
        .RCC
        .ahb1enr
        .modify(|_, w| w.gpioaen().enabled().gpiocen().enabled());

    // GPIOC-13 がユーザ LED に接続されている
    peripheral.GPIOC.moder.modify(|_, w| w.moder13().output());
    peripheral.GPIOC.otyper.modify(|_, w| w.ot13().push_pull());

    // GPIOA-0 が KEY ボタン (押すと GND)
    peripheral.GPIOA.moder.modify(|_, w| w.moder0().input());
    peripheral.GPIOA.pupdr.modify(|_, w| w.pupdr0().pull_up());

    loop {
        let button = if peripheral.GPIOA.idr.read().idr0().is_low() {
            Level::Low
        } else {
            Level::High
        };

        // BSRR は write (他のピンに影響しない)
        match led_level_for(button) {
            Level::High => peripheral.GPIOC.bsrr.write(|w| w.bs13().set_bit()),
            Level::Low => peripheral.GPIOC.bsrr.write(|w| w.br13().set_bit()),
        }
    }
}
