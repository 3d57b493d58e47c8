use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// two's-complement wraparound
    Wrap,
    /// stop at the first overflowing cell
    Check,
}

pub struct GlobalSettings {
    pub cell_separator: String,
    pub overflow: OverflowPolicy,
    pub show_progress: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            cell_separator: "\t".to_string(),
            overflow: OverflowPolicy::Wrap,
            show_progress: true,
        }
    }
}

impl GlobalSettings {
    #[inline]
    pub fn set_cell_separator(&mut self, sep: &str) {
        self.cell_separator = sep.to_string();
    }

    #[inline]
    pub fn set_overflow(&mut self, policy: OverflowPolicy) {
        self.overflow = policy;
    }

    #[inline]
    pub fn set_show_progress(&mut self, flag: bool) {
        self.show_progress = flag;
    }
}

static GLOBAL_SETTINGS: OnceLock<RwLock<GlobalSettings>> = OnceLock::new();

fn settings_lock() -> &'static RwLock<GlobalSettings> {
    GLOBAL_SETTINGS.get_or_init(|| RwLock::new(GlobalSettings::default()))
}

pub fn global_settings() -> RwLockReadGuard<'static, GlobalSettings> {
    // a poisoned lock still holds plain data
    settings_lock().read().unwrap_or_else(|e| e.into_inner())
}

pub fn global_settings_w() -> RwLockWriteGuard<'static, GlobalSettings> {
    settings_lock().write().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let s = GlobalSettings::default();
        assert_eq!(s.cell_separator, "\t");
        assert_eq!(s.overflow, OverflowPolicy::Wrap);
        assert!(s.show_progress);
    }

    #[test]
    fn setters() {
        let mut s = GlobalSettings::default();
        s.set_cell_separator(" ");
        s.set_overflow(OverflowPolicy::Check);
        s.set_show_progress(false);
        assert_eq!(s.cell_separator, " ");
        assert_eq!(s.overflow, OverflowPolicy::Check);
        assert!(!s.show_progress);
    }
}
