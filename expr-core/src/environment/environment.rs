use std::collections::HashMap;

// Name-to-value bindings for one run. Lookup goes through the map; the
// order vector remembers first assignment so bindings can be shown back
// in the order they appeared.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, f64>,
    order: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: vec![]
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.store.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        if !self.store.contains_key(name) {
            self.order.push(name.to_string());
        }

        self.store.insert(name.to_string(), value);
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, f64)> {
        self.order.iter().map(|name| {
            (name.as_str(), self.store[name])
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
