// ボードの配線
// WeAct Black Pill: KEY ボタンは PA0 - GND、ユーザ LED は PC13

use crate::gpio::{Level, PinId, Port};

pub const BUTTON: PinId = PinId::new(Port::A, 0);
pub const LED: PinId = PinId::new(Port::C, 13);

/// ボタンを押したときに IDR に見えるレベル (内部プルアップで押すと Low)
pub const BUTTON_PRESSED_LEVEL: Level = Level::Low;

/// ボタンを押している間に LED ピンへ出すレベル
pub const LED_ON_LEVEL: Level = Level::High;
