use std::cell::Cell;
use std::rc::Rc;

/// Test helper which increments a shared counter when dropped, used to check that removed slots
/// are actually destroyed.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
