// STM32F411 (Black Pill) のボタンで LED を点灯させるためのレジスタ操作一式
// ロジックはホストでもテストできるよう、デバイスクレートには依存させない

#![cfg_attr(not(test), no_std)]

pub mod button_led;
pub mod config;
pub mod gpio;
pub mod reg;

#[cfg(test)]
mod test_util;

pub use button_led::{led_level_for, mirror, ButtonLed, Error};
pub use gpio::{Gpio, Level, Mode, OutputType, PinId, Port, Pull, Rcc};
