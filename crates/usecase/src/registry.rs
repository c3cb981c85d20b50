// crates/usecase/src/registry.rs
use line_counter_ports::Counter;

/// Named strategy instances, kept in registration order.
#[derive(Default)]
pub struct CounterRegistry {
    counters: Vec<Box<dyn Counter>>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `counter`, replacing any registered instance with the same name.
    pub fn register(&mut self, counter: Box<dyn Counter>) -> &mut Self {
        let name = counter.name();
        match self.counters.iter().position(|c| c.name() == name) {
            Some(index) => self.counters[index] = counter,
            None => self.counters.push(counter),
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.counters.iter().map(|c| c.name())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Counter>> {
        self.counters.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl FromIterator<Box<dyn Counter>> for CounterRegistry {
    fn from_iter<I: IntoIterator<Item = Box<dyn Counter>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for counter in iter {
            registry.register(counter);
        }
        registry
    }
}

impl std::fmt::Debug for CounterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use line_counter_ports::ByteSource;
    use line_counter_shared_kernel::{CountResult, LineCount};

    use super::*;

    struct Fixed(&'static str, usize);

    impl Counter for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn count(&mut self, _: &mut dyn ByteSource) -> CountResult<LineCount> {
            Ok(LineCount::new(self.1))
        }
    }

    #[test]
    fn keeps_registration_order() {
        let registry: CounterRegistry =
            [Box::new(Fixed("b", 1)) as Box<dyn Counter>, Box::new(Fixed("a", 2))].into_iter().collect();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn same_name_replaces() {
        let mut registry = CounterRegistry::new();
        registry.register(Box::new(Fixed("a", 1))).register(Box::new(Fixed("a", 5)));
        assert_eq!(registry.len(), 1);

        let counter = registry.iter_mut().next().unwrap();
        let lines = counter.count(&mut std::io::Cursor::new(Vec::new())).unwrap();
        assert_eq!(lines, 5usize);
    }
}
