// STM32F411 のレジスタマップ
// リファレンスマニュアル RM0383 のアドレス / オフセット / ビット配置をそのまま定数にしている

// AHB1 上のペリフェラル
pub const RCC_BASE: usize = 0x4002_3800;
pub const GPIOA_BASE: usize = 0x4002_0000;
pub const GPIOC_BASE: usize = 0x4002_0800;

// RCC
pub const RCC_AHB1ENR_OFFSET: usize = 0x30;

pub const RCC_AHB1ENR_GPIOAEN: u32 = 1 << 0;
pub const RCC_AHB1ENR_GPIOCEN: u32 = 1 << 2;

// GPIO (全ポート共通のオフセット)
pub const GPIO_MODER_OFFSET: usize = 0x00;
pub const GPIO_OTYPER_OFFSET: usize = 0x04;
pub const GPIO_PUPDR_OFFSET: usize = 0x0c;
pub const GPIO_IDR_OFFSET: usize = 0x10;
pub const GPIO_BSRR_OFFSET: usize = 0x18;

// ピン番号は 0 ~ 15
const fn checked(pin: u8) -> u8 {
    assert!(pin < 16, "GPIO pin number out of range");
    pin
}

// MODER / PUPDR は 1 ピン 2bit
pub const fn moder_shift(pin: u8) -> u32 {
    (checked(pin) as u32) << 1
}

pub const fn moder_mask(pin: u8) -> u32 {
    0b11 << moder_shift(pin)
}

pub const fn pupdr_shift(pin: u8) -> u32 {
    (checked(pin) as u32) << 1
}

pub const fn pupdr_mask(pin: u8) -> u32 {
    0b11 << pupdr_shift(pin)
}

// OTYPER / IDR は 1 ピン 1bit
pub const fn otyper_mask(pin: u8) -> u32 {
    1 << checked(pin)
}

pub const fn idr_mask(pin: u8) -> u32 {
    1 << checked(pin)
}

// BSRR: 下位16bitがセット、上位16bitがリセット
pub const fn bsrr_set(pin: u8) -> u32 {
    1 << checked(pin)
}

pub const fn bsrr_reset(pin: u8) -> u32 {
    1 << (checked(pin) as u32 + 16)
}

/// 32bit のレジスタ 1 ワード分へのアクセス
///
/// 実機では [`Mmio`]、ホストのテストでは `Cell<u32>` などで差し替える。
pub trait Register {
    fn read(&self) -> u32;
    fn write(&self, value: u32);

    /// read-modify-write
    fn modify<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        self.write(f(self.read()));
    }
}

/// 固定アドレスのメモリマップドレジスタ
#[derive(Debug)]
pub struct Mmio {
    address: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `address` は有効なレジスタで、プログラムの実行中はこのインスタンスだけが触ること。
    pub const unsafe fn new(address: usize) -> Self {
        Self { address }
    }
}

impl Register for Mmio {
    #[inline(always)]
    fn read(&self) -> u32 {
        // new() の契約によりアドレスは有効
        unsafe { core::ptr::read_volatile(self.address as *const u32) }
    }

    #[inline(always)]
    fn write(&self, value: u32) {
        unsafe { core::ptr::write_volatile(self.address as *mut u32, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_addresses() {
        assert_eq!(RCC_BASE + RCC_AHB1ENR_OFFSET, 0x4002_3830);
        assert_eq!(GPIOA_BASE + GPIO_IDR_OFFSET, 0x4002_0010);
        assert_eq!(GPIOC_BASE + GPIO_MODER_OFFSET, 0x4002_0800);
        assert_eq!(GPIOC_BASE + GPIO_BSRR_OFFSET, 0x4002_0818);
    }

    #[test]
    fn field_masks() {
        assert_eq!(moder_mask(0), 0b11);
        assert_eq!(moder_mask(13), 0b11 << 26);
        assert_eq!(pupdr_mask(15), 0b11 << 30);
        assert_eq!(otyper_mask(13), 1 << 13);
        assert_eq!(idr_mask(0), 1);
    }

    #[test]
    fn bsrr_halves() {
        assert_eq!(bsrr_set(13), 0x0000_2000);
        assert_eq!(bsrr_reset(13), 0x2000_0000);
        assert_eq!(bsrr_reset(15), 1 << 31);
    }

    #[test]
    #[should_panic(expected = "GPIO pin number out of range")]
    fn bsrr_set_rejects_pin_20() {
        // 通っていたら bsrr_reset(4) と同じ値になってしまう
        bsrr_set(core::hint::black_box(20));
    }

    #[test]
    #[should_panic(expected = "GPIO pin number out of range")]
    fn moder_mask_rejects_pin_16() {
        moder_mask(core::hint::black_box(16));
    }
}
