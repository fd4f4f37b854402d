// RCC のクロック供給と GPIO ポートの操作
// 書き込みはすべてレジスタ単位で、BSRR 以外は read-modify-write

use crate::reg::{self, Mmio, Register};

/// このファームで使うポート (ボタン: A, LED: C)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    C,
}

impl Port {
    pub const fn base(self) -> usize {
        match self {
            Port::A => reg::GPIOA_BASE,
            Port::C => reg::GPIOC_BASE,
        }
    }

    /// RCC_AHB1ENR のクロック許可ビット
    pub const fn clock_enable_bit(self) -> u32 {
        match self {
            Port::A => reg::RCC_AHB1ENR_GPIOAEN,
            Port::C => reg::RCC_AHB1ENR_GPIOCEN,
        }
    }
}

/// ポートとピン番号 (0 ~ 15) の組
///
/// `new` 以外では作れないので、ピン番号は常に範囲内。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinId {
    port: Port,
    pin: u8,
}

impl PinId {
    /// ピン番号が範囲外なら panic (const 文脈ではコンパイルエラー)
    pub const fn new(port: Port, pin: u8) -> Self {
        assert!(pin < 16, "GPIO pin number out of range");
        Self { port, pin }
    }

    pub const fn port(self) -> Port {
        self.port
    }

    pub const fn pin(self) -> u8 {
        self.pin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Mode {
    Input = 0,
    Output = 1,
    Alternate = 2,
    Analog = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OutputType {
    PushPull = 0,
    OpenDrain = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Pull {
    None = 0,
    Up = 1,
    Down = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// RCC のうち、ここで使う AHB1ENR だけ
pub struct Rcc<R> {
    ahb1enr: R,
}

impl<R: Register> Rcc<R> {
    pub fn from_registers(ahb1enr: R) -> Self {
        Self { ahb1enr }
    }

    /// 指定ポートのクロックを ON (他のビットはそのまま)
    pub fn enable_gpio(&self, ports: &[Port]) {
        let bits = ports
            .iter()
            .fold(0, |acc, port| acc | port.clock_enable_bit());
        self.ahb1enr.modify(|value| value | bits);
    }

    pub fn is_gpio_enabled(&self, port: Port) -> bool {
        self.ahb1enr.read() & port.clock_enable_bit() != 0
    }
}

impl Rcc<Mmio> {
    /// # Safety
    ///
    /// RCC_AHB1ENR を他から同時に操作しないこと。
    pub unsafe fn take() -> Self {
        Self::from_registers(Mmio::new(reg::RCC_BASE + reg::RCC_AHB1ENR_OFFSET))
    }
}

/// GPIO ポート 1 つ分のレジスタ群
///
/// ピン操作は `PinId` で受け取り、別ポートのピンを渡すと panic する。
pub struct Gpio<R> {
    port: Port,
    moder: R,
    otyper: R,
    pupdr: R,
    idr: R,
    bsrr: R,
}

impl<R: Register> Gpio<R> {
    pub fn from_registers(port: Port, moder: R, otyper: R, pupdr: R, idr: R, bsrr: R) -> Self {
        Self {
            port,
            moder,
            otyper,
            pupdr,
            idr,
            bsrr,
        }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    // 他ポートのレジスタを書き換えないように
    fn pin_of(&self, id: PinId) -> u8 {
        assert_eq!(id.port, self.port, "pin belongs to another GPIO port");
        id.pin
    }

    pub fn set_mode(&self, id: PinId, mode: Mode) {
        let pin = self.pin_of(id);
        self.moder.modify(|value| {
            (value & !reg::moder_mask(pin)) | ((mode as u32) << reg::moder_shift(pin))
        });
    }

    pub fn mode(&self, id: PinId) -> Mode {
        let pin = self.pin_of(id);
        match (self.moder.read() & reg::moder_mask(pin)) >> reg::moder_shift(pin) {
            0 => Mode::Input,
            1 => Mode::Output,
            2 => Mode::Alternate,
            _ => Mode::Analog,
        }
    }

    pub fn set_output_type(&self, id: PinId, output_type: OutputType) {
        let pin = self.pin_of(id);
        self.otyper.modify(|value| {
            (value & !reg::otyper_mask(pin)) | ((output_type as u32) << pin)
        });
    }

    pub fn output_type(&self, id: PinId) -> OutputType {
        let pin = self.pin_of(id);
        if self.otyper.read() & reg::otyper_mask(pin) == 0 {
            OutputType::PushPull
        } else {
            OutputType::OpenDrain
        }
    }

    pub fn set_pull(&self, id: PinId, pull: Pull) {
        let pin = self.pin_of(id);
        self.pupdr.modify(|value| {
            (value & !reg::pupdr_mask(pin)) | ((pull as u32) << reg::pupdr_shift(pin))
        });
    }

    // 0b11 は予約値なので None 扱い
    pub fn pull(&self, id: PinId) -> Pull {
        let pin = self.pin_of(id);
        match (self.pupdr.read() & reg::pupdr_mask(pin)) >> reg::pupdr_shift(pin) {
            1 => Pull::Up,
            2 => Pull::Down,
            _ => Pull::None,
        }
    }

    /// IDR から入力レベルを読む
    pub fn read_level(&self, id: PinId) -> Level {
        let pin = self.pin_of(id);
        if self.idr.read() & reg::idr_mask(pin) == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    // BSRR は書き込み専用なので modify しない
    pub fn set_high(&self, id: PinId) {
        self.bsrr.write(reg::bsrr_set(self.pin_of(id)));
    }

    pub fn set_low(&self, id: PinId) {
        self.bsrr.write(reg::bsrr_reset(self.pin_of(id)));
    }

    pub fn set_level(&self, id: PinId, level: Level) {
        match level {
            Level::High => self.set_high(id),
            Level::Low => self.set_low(id),
        }
    }
}

impl Gpio<Mmio> {
    /// # Safety
    ///
    /// 同じポートの `Gpio` を 2 つ以上作らないこと。
    pub unsafe fn take(port: Port) -> Self {
        let base = port.base();
        Self::from_registers(
            port,
            Mmio::new(base + reg::GPIO_MODER_OFFSET),
            Mmio::new(base + reg::GPIO_OTYPER_OFFSET),
            Mmio::new(base + reg::GPIO_PUPDR_OFFSET),
            Mmio::new(base + reg::GPIO_IDR_OFFSET),
            Mmio::new(base + reg::GPIO_BSRR_OFFSET),
        )
    }
}
