// ホストテスト用の偽レジスタ

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::reg::Register;

/// 複数レジスタへの書き込み順を記録する (レジスタ名, 書いた値)
pub type WriteLog = Rc<RefCell<Vec<(&'static str, u32)>>>;

pub struct FakeReg {
    value: Cell<u32>,
    writes: Cell<usize>,
    readable: bool,
    name: &'static str,
    log: Option<WriteLog>,
}

impl FakeReg {
    pub fn new(value: u32) -> Self {
        Self {
            value: Cell::new(value),
            writes: Cell::new(0),
            readable: true,
            name: "",
            log: None,
        }
    }

    /// BSRR のように読んではいけないレジスタ
    pub fn write_only() -> Self {
        Self {
            readable: false,
            ..Self::new(0)
        }
    }

    pub fn logged(self, name: &'static str, log: &WriteLog) -> Self {
        Self {
            name,
            log: Some(Rc::clone(log)),
            ..self
        }
    }

    /// ハードウェア側からの変化 (書き込み回数には数えない)
    pub fn set(&self, value: u32) {
        self.value.set(value);
    }

    pub fn get(&self) -> u32 {
        self.value.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Register for FakeReg {
    fn read(&self) -> u32 {
        assert!(self.readable, "read of a write-only register");
        self.value.get()
    }

    fn write(&self, value: u32) {
        self.writes.set(self.writes.get() + 1);
        self.value.set(value);
        if let Some(log) = &self.log {
            log.borrow_mut().push((self.name, value));
        }
    }
}
