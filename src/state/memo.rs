use std::rc::Rc;

/// Caches one derived value keyed by its declared dependencies.
///
/// Equal dependencies hand back the same `Rc`, so props built from it keep
/// comparing equal and the renderer can skip the subtree.
#[derive(Debug)]
pub struct Memo<D, T: ?Sized> {
    slot: Option<(D, Rc<T>)>,
}

impl<D, T: ?Sized> Default for Memo<D, T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<D: PartialEq + Clone, T: ?Sized> Memo<D, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, deps: &D, compute: impl FnOnce(&D) -> Rc<T>) -> Rc<T> {
        if let Some((cached_deps, value)) = &self.slot {
            if cached_deps == deps {
                return Rc::clone(value);
            }
        }

        let value = compute(deps);
        self.slot = Some((deps.clone(), Rc::clone(&value)));
        value
    }
}
