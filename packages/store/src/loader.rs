//! Progress model for the one-time matching loader.
//!
//! The UI owns two timers: one calls [`LoaderProgress::tick`], the other
//! [`LoaderProgress::rotate_step`]. Both stop once `tick` reports
//! [`Tick::Finished`] or the loader component is dropped.

/// Step labels rotated while matching.
pub const STEPS: [&str; 3] = [
    "分析您的学术背景...",
    "匹配全球奖学金数据库...",
    "生成个性化推荐...",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running,
    /// Reported exactly once, on the tick that reaches 100%.
    Finished,
    /// Any tick after completion.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderProgress {
    percent: u8,
    step: usize,
    increment: u8,
    finished: bool,
}

impl Default for LoaderProgress {
    fn default() -> Self {
        Self::new(2)
    }
}

impl LoaderProgress {
    pub fn new(increment: u8) -> Self {
        Self {
            percent: 0,
            step: 0,
            increment: increment.max(1),
            finished: false,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Idle;
        }
        self.percent = self.percent.saturating_add(self.increment).min(100);
        if self.percent >= 100 {
            self.finished = true;
            Tick::Finished
        } else {
            Tick::Running
        }
    }

    pub fn rotate_step(&mut self) {
        self.step = (self.step + 1) % STEPS.len();
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_label(&self) -> &'static str {
        STEPS[self.step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finishes_once_after_fifty_ticks() {
        let mut progress = LoaderProgress::default();
        for _ in 0..49 {
            assert_eq!(progress.tick(), Tick::Running);
        }
        assert_eq!(progress.percent(), 98);
        assert_eq!(progress.tick(), Tick::Finished);
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.tick(), Tick::Idle);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_uneven_increment_caps_at_100() {
        let mut progress = LoaderProgress::new(30);
        progress.tick();
        progress.tick();
        progress.tick();
        assert_eq!(progress.tick(), Tick::Finished);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_step_rotation_wraps() {
        let mut progress = LoaderProgress::default();
        assert_eq!(progress.step_label(), STEPS[0]);
        progress.rotate_step();
        progress.rotate_step();
        progress.rotate_step();
        assert_eq!(progress.step_index(), 0);
    }
}
