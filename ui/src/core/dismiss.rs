//! Outside-click dismissal.
//!
//! A dropdown registers two [`RegionHandle`]s (its trigger and its panel) and
//! installs a single pointer-down listener on an injected [`PointerSource`]. The
//! listener asks for dismissal whenever a press lands outside both regions. The
//! returned [`OutsideDismiss`] guard owns the registration and removes it when
//! released or dropped.
//!
//! Regions are identified by a key rendered into markup as `data-region`; a press
//! target is the set of region keys found on the pressed element and its
//! ancestors.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use uuid::Uuid;

/// DOM attribute carrying a region key.
pub const REGION_ATTRIBUTE: &str = "data-region";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Debug, Error)]
pub enum PointerError {
    #[error("document is not available")]
    DocumentUnavailable,
    #[error("pointer listener registration rejected: {0}")]
    Register(String),
    #[error("pointer listener removal rejected: {0}")]
    Unregister(String),
}

/// Region keys enclosing the element a press landed on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressTarget {
    regions: Vec<String>,
}

impl PressTarget {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }

    /// A press on an element outside every registered region.
    pub fn nowhere() -> Self {
        Self::default()
    }

    pub fn within(&self, key: &str) -> bool {
        self.regions.iter().any(|region| region == key)
    }
}

/// Render-stable identity of a DOM region. Clones share the attached flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionHandle {
    key: Rc<str>,
    attached: Rc<Cell<bool>>,
}

impl RegionHandle {
    /// New handle with a key unique to this instance, e.g. `profile-panel-3f2a…`.
    pub fn new(name: &str) -> Self {
        Self::with_key(format!("{name}-{}", Uuid::new_v4().simple()))
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self {
            key: Rc::from(key),
            attached: Rc::new(Cell::new(false)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The region's element is in the document.
    pub fn attach(&self) {
        self.attached.set(true);
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    /// Follow the render state: a region that is not rendered is detached.
    /// Attaching waits for the element's `onmounted`.
    pub fn sync_rendered(&self, rendered: bool) {
        if !rendered {
            self.detach();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn contains(&self, target: &PressTarget) -> bool {
        target.within(&self.key)
    }
}

/// A press dismisses only when both regions are attached and neither contains it.
pub fn is_outside(target: &PressTarget, trigger: &RegionHandle, panel: &RegionHandle) -> bool {
    trigger.is_attached()
        && panel.is_attached()
        && !trigger.contains(target)
        && !panel.contains(target)
}

pub type PressHandler = Box<dyn FnMut(&PressTarget)>;

/// Document-level pointer-down events, injected so tests can drive them.
pub trait PointerSource {
    fn listen(&self, handler: PressHandler) -> Result<ListenerId, PointerError>;

    fn unlisten(&self, id: ListenerId) -> Result<(), PointerError>;
}

/// Owns one pointer-down registration. Released exactly once.
pub struct OutsideDismiss<S: PointerSource> {
    source: S,
    listener: Option<ListenerId>,
}

impl<S: PointerSource> OutsideDismiss<S> {
    pub fn install<F>(
        source: S,
        trigger: RegionHandle,
        panel: RegionHandle,
        mut on_dismiss: F,
    ) -> Result<Self, PointerError>
    where
        F: FnMut() + 'static,
    {
        let listener = source.listen(Box::new(move |target: &PressTarget| {
            if is_outside(target, &trigger, &panel) {
                on_dismiss();
            }
        }))?;
        tracing::debug!(listener = listener.0, "outside-click listener installed");

        Ok(Self {
            source,
            listener: Some(listener),
        })
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    pub fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            match self.source.unlisten(listener) {
                Ok(()) => tracing::debug!(listener = listener.0, "outside-click listener removed"),
                Err(err) => tracing::warn!(
                    listener = listener.0,
                    %err,
                    "outside-click listener not removed"
                ),
            }
        }
    }
}

impl<S: PointerSource> Drop for OutsideDismiss<S> {
    fn drop(&mut self) {
        self.release();
    }
}
