//! Per-controller state-change notifications.

use std::cell::RefCell;
use std::rc::Rc;

/// Handlers registered on one controller.
///
/// `emit` snapshots the handler list first, so a handler may subscribe
/// further handlers without re-borrowing.
pub struct Listeners<T> {
    handlers: RefCell<Vec<Rc<dyn Fn(&T)>>>,
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    pub fn emit(&self, event: &T) {
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_every_handler() {
        let listeners = Listeners::<u32>::new();
        let sum = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let sum = sum.clone();
            listeners.subscribe(move |value| sum.set(sum.get() + value));
        }
        listeners.emit(&5);
        assert_eq!(sum.get(), 10);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn test_subscribe_from_handler() {
        let listeners = Rc::new(Listeners::<()>::new());
        let inner = listeners.clone();
        listeners.subscribe(move |_| inner.subscribe(|_| {}));
        listeners.emit(&());
        assert_eq!(listeners.len(), 2);
    }
}
