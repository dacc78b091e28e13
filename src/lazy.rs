pub const LAZY_SELECTOR: &str = "img[data-src]";
pub const LAZY_CLASS: &str = "lazy";

/// Deferred image sources, each handed out on first intersection only.
#[derive(Default)]
pub struct LazyImages {
    pending: Vec<Option<String>>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, src: impl Into<String>) -> u32 {
        self.pending.push(Some(src.into()));
        u32::try_from(self.pending.len() - 1).unwrap_or(u32::MAX)
    }

    pub fn on_intersect(&mut self, id: u32) -> Option<String> {
        self.pending.get_mut(usize::try_from(id).ok()?)?.take()
    }

    pub fn remaining(&self) -> usize {
        self.pending.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_released_exactly_once() {
        let mut images = LazyImages::new();
        let hero = images.register("/img/hero.png");
        let chart = images.register("/img/chart.svg");
        assert_eq!(images.remaining(), 2);

        assert_eq!(images.on_intersect(hero).as_deref(), Some("/img/hero.png"));
        assert_eq!(images.on_intersect(hero), None);
        assert_eq!(images.remaining(), 1);

        assert_eq!(images.on_intersect(chart).as_deref(), Some("/img/chart.svg"));
        assert_eq!(images.remaining(), 0);
    }

    #[test]
    fn unknown_ids_release_nothing() {
        let mut images = LazyImages::new();
        assert_eq!(images.on_intersect(3), None);
    }
}
