use std::sync::{Mutex, OnceLock};

use ulid::{Generator, Ulid};

/// Owned ULID source for log ids.
pub struct LogIdGen {
    generator: Generator,
}

impl Default for LogIdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl LogIdGen {
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }

    #[inline(always)]
    pub fn generate(&mut self) -> String {
        // Monotonic within one millisecond: the random part is incremented.
        // Overflowing 80 random bits falls back to a fresh random id.
        self.generator
            .generate()
            .unwrap_or_else(|_| Ulid::new())
            .to_string()
    }
}

static GLOBAL_GEN: OnceLock<Mutex<LogIdGen>> = OnceLock::new();

/// Mint a process-wide unique log id.
pub fn next_log_id() -> String {
    let shared = GLOBAL_GEN.get_or_init(|| Mutex::new(LogIdGen::new()));
    match shared.lock() {
        Ok(mut id_gen) => id_gen.generate(),
        // A poisoned lock only means another thread panicked mid-generate.
        Err(poisoned) => poisoned.into_inner().generate(),
    }
}
