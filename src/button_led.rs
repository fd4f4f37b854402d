// ボタンの状態を LED にそのまま映す
// 割り込みもデバウンスも無し、ひたすらポーリング

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::{BUTTON, BUTTON_PRESSED_LEVEL, LED, LED_ON_LEVEL};
use crate::gpio::{Gpio, Level, Mode, OutputType, PinId, Pull, Rcc};
use crate::reg::Register;

/// ボタンのレベルから LED ピンに出すレベルを決める
pub fn led_level_for(button: Level) -> Level {
    if button == BUTTON_PRESSED_LEVEL {
        LED_ON_LEVEL
    } else {
        !LED_ON_LEVEL
    }
}

pub struct ButtonLed<R> {
    button_port: Gpio<R>,
    button: PinId,
    led_port: Gpio<R>,
    led: PinId,
}

impl<R: Register> ButtonLed<R> {
    /// config の配線 (PA0 / PC13) で初期化
    pub fn init<C: Register>(rcc: &Rcc<C>, button_port: Gpio<R>, led_port: Gpio<R>) -> Self {
        Self::init_with(rcc, BUTTON, button_port, LED, led_port)
    }

    /// 1. 両ポートのクロック ON
    /// 2. LED ピンを push-pull 出力
    /// 3. ボタンピンをプルアップ付き入力
    ///
    /// ピンとポートの組み合わせが合わないときは何も書かずに panic する。
    pub fn init_with<C: Register>(
        rcc: &Rcc<C>,
        button: PinId,
        button_port: Gpio<R>,
        led: PinId,
        led_port: Gpio<R>,
    ) -> Self {
        assert_eq!(button.port(), button_port.port(), "button pin on wrong port");
        assert_eq!(led.port(), led_port.port(), "LED pin on wrong port");

        // クロックを入れる前の GPIO レジスタ書き込みは無視される
        rcc.enable_gpio(&[button.port(), led.port()]);

        led_port.set_mode(led, Mode::Output);
        led_port.set_output_type(led, OutputType::PushPull);

        button_port.set_mode(button, Mode::Input);
        button_port.set_pull(button, Pull::Up);

        Self {
            button_port,
            button,
            led_port,
            led,
        }
    }

    /// 1 回分のポーリング。読んだボタンのレベルを返す
    pub fn step(&self) -> Level {
        let button = self.button_port.read_level(self.button);
        self.led_port.set_level(self.led, led_level_for(button));
        button
    }

    pub fn run(&self) -> ! {
        loop {
            self.step();
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error<IE, OE> {
    Input(IE),
    Output(OE),
}

/// embedded-hal のピンで同じことをする (HAL 版のデモ用)
pub fn mirror<I, O>(button: &I, led: &mut O) -> Result<Level, Error<I::Error, O::Error>>
where
    I: InputPin,
    O: OutputPin,
{
    let level = if button.is_low().map_err(Error::Input)? {
        Level::Low
    } else {
        Level::High
    };

    match led_level_for(level) {
        Level::High => led.set_high(),
        Level::Low => led.set_low(),
    }
    .map_err(Error::Output)?;

    Ok(level)
}
