// ボタン (PA0) を押している間だけ LED (PC13) を点灯
// HAL (stm32f4xx-hal) 版

#![no_std]
#![no_main]

// pick a panicking behavior
use panic_halt as _; // you can put a breakpoint on `rust_begin_unwind` to catch panics

// cortex-m コア向けのスタートアップ処理を提供
use cortex_m_rt::entry;

use cortex_m_semihosting::hprintln;

use stm32f4xx_hal as hal;

// pac は stm32f4::stm32f411 と同義
use crate::hal::{pac, prelude::*};

use stm32f411_button_led::mirror;

#[entry]
fn main() -> ! {
    let peripheral = pac::Peripherals::take().unwrap();

    // split した時点で内部的にperipheralへのクロックがONされる
    let gpioa = peripheral.GPIOA.split();
    let gpioc = peripheral.GPIOC.split();

    let button = gpioa.pa0.into_pull_up_input(); // 入力設定 & 内部プルアップ
    let mut led = gpioc.pc13.into_push_pull_output(); // 出力設定 & push-pull モード

    loop {
        // HAL のピンのエラー型は Infallible
        if let Err(e) = mirror(&button, &mut led) {
            hprintln!("{:?}", e).ok();
        }
    }
}
