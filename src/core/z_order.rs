//! Z-Order-Stack: monoton wachsende Stacking-Indizes.

/// Vergibt Stacking-Indizes für Fenster.
///
/// Der Zähler wächst bei jedem Fokus-Ereignis und wird nie dekrementiert
/// oder wiederverwendet; auch ein erneuter Fokus auf das oberste Fenster
/// zählt hoch. Damit tragen nie zwei Fenster denselben Index.
#[derive(Debug, Clone, Default)]
pub struct ZOrderStack {
    counter: u64,
}

impl ZOrderStack {
    /// Erstellt einen Stack mit Zähler 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt den nächsten Stacking-Index.
    pub fn next(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Zuletzt vergebener Index (0 = noch keiner vergeben).
    pub fn current(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_strictly_increasing() {
        let mut stack = ZOrderStack::new();
        let a = stack.next();
        let b = stack.next();
        let c = stack.next();

        assert!(a < b && b < c);
        assert_eq!(stack.current(), c);
    }

    #[test]
    fn fresh_stack_starts_at_zero() {
        let stack = ZOrderStack::new();
        assert_eq!(stack.current(), 0);
    }
}
