/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::store::{ElevatorStore, SubscriptionId};

type Listener = Box<dyn FnMut(&str)>;

struct Projection {
    floor_id: String,
    listeners: Vec<Listener>,
    watchers: Vec<cbc::Sender<String>>,
}

/**
 * Read-only projection of the store onto the id of the current floor.
 *
 * The id is recomputed and published to every listener each time the store notifies,
 * whether or not it changed. Dropping the view detaches it from the store at the next
 * notification.
 */
pub struct CurrentFloorView {
    projection: Rc<RefCell<Projection>>,
    subscription: SubscriptionId,
}

impl CurrentFloorView {
    pub fn attach(store: &mut ElevatorStore) -> CurrentFloorView {
        let projection = Rc::new(RefCell::new(Projection {
            floor_id: store.state().current_floor.id.clone(),
            listeners: Vec::new(),
            watchers: Vec::new(),
        }));

        // Held weakly so a dropped view falls out of the store on the next notification
        let shared: Weak<RefCell<Projection>> = Rc::downgrade(&projection);
        let subscription = store.subscribe_while(move |state| match shared.upgrade() {
            Some(projection) => {
                publish(&projection, &state.current_floor.id);
                true
            }
            None => false,
        });

        CurrentFloorView {
            projection,
            subscription,
        }
    }

    pub fn get(&self) -> String {
        self.projection.borrow().floor_id.clone()
    }

    /// Store subscription backing this view, for `ElevatorStore::unsubscribe`.
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Registers `listener`. It is called once right away with the current id.
    pub fn subscribe<F>(&self, mut listener: F)
    where
        F: FnMut(&str) + 'static,
    {
        let floor_id = self.get();
        listener(&floor_id);
        self.projection.borrow_mut().listeners.push(Box::new(listener));
    }

    pub fn watch(&self) -> cbc::Receiver<String> {
        let (floor_id_tx, floor_id_rx) = cbc::unbounded::<String>();
        let mut projection = self.projection.borrow_mut();
        let _ = floor_id_tx.send(projection.floor_id.clone());
        projection.watchers.push(floor_id_tx);
        floor_id_rx
    }
}

fn publish(projection: &Rc<RefCell<Projection>>, floor_id: &str) {
    // Listeners run without the borrow held so they may read the view
    let mut listeners = {
        let mut projection = projection.borrow_mut();
        projection.floor_id = floor_id.to_string();
        projection
            .watchers
            .retain(|floor_id_tx| floor_id_tx.send(floor_id.to_string()).is_ok());
        std::mem::take(&mut projection.listeners)
    };

    for listener in listeners.iter_mut() {
        listener(floor_id);
    }

    // Keep any listener registered while publishing
    let mut projection = projection.borrow_mut();
    listeners.append(&mut projection.listeners);
    projection.listeners = listeners;
}
