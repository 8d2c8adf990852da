use std::rc::Rc;

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

/// Observers are notified in registration order, one at a time. There is no
/// unregistration: the sequence only grows for the lifetime of the subject.
pub trait Subject<E: Clone> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn notify_observers(&self, event: E);
}
