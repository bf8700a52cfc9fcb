use std::rc::Rc;

use crate::leads::notify::{LeadNotifier, ParentWindowNotifier};
use crate::leads::store::{BrowserStore, LeadStore};

/// Storage and notification backends shared through a Yew context.
#[derive(Clone)]
pub struct LeadServices {
    pub store: Rc<dyn LeadStore>,
    pub notifier: Rc<dyn LeadNotifier>,
}

impl LeadServices {
    pub fn browser() -> Self {
        Self {
            store: Rc::new(BrowserStore::default()),
            notifier: Rc::new(ParentWindowNotifier),
        }
    }
}

impl PartialEq for LeadServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}
