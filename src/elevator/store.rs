/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::action::Action;
use crate::floors::FloorRegistry;
use crate::shared::{Direction, ElevatorState, Floor};

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("no floor with id '{0}'")]
    FloorNotFound(String),
    #[error("already at floor '{0}'")]
    AlreadyAtFloor(String),
}

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Departure(Floor),
    Arrival,
    DoorsOpened,
    DoorsClosed,
    Reset,
}

enum Observer {
    Callback(Box<dyn FnMut(&ElevatorState)>),
    // Removed once it returns false
    Retained(Box<dyn FnMut(&ElevatorState) -> bool>),
    Channel(cbc::Sender<ElevatorState>),
}

pub type SubscriptionId = usize;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Holds the navigation state of the elevator and notifies observers of every change.
 *
 * The store owns the state; it only changes through the five actions
 * (`go_to_floor`, `arrive_at_floor`, `open_doors`, `close_doors`, `reset`).
 * Requests that are not valid in the current state are ignored and no
 * observer is notified. Observers run synchronously, in subscription order,
 * before the action returns.
 *
 * # Fields
 * - `registry`:            Floors the elevator can travel between.
 * - `state`:               Current snapshot.
 * - `observers`:           Callbacks and channels notified after each accepted change.
 * - `next_subscription`:   Id handed out by the next `subscribe`/`watch`.
 */
pub struct ElevatorStore {
    registry: FloorRegistry,
    state: ElevatorState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl ElevatorStore {
    pub fn new(registry: FloorRegistry) -> ElevatorStore {
        let state = ElevatorState::new(registry.first().clone());
        ElevatorStore {
            registry,
            state,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    pub fn registry(&self) -> &FloorRegistry {
        &self.registry
    }

    /// Registers `callback`. It is called once right away with the current state.
    ///
    /// Callbacks run while the store is mutably borrowed, so they must not call back
    /// into the store (for example through an `Rc<RefCell<ElevatorStore>>`).
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&ElevatorState) + 'static,
    {
        callback(&self.state);
        self.add_observer(Observer::Callback(Box::new(callback)))
    }

    /// Like `subscribe`, but the observer is removed as soon as `callback` returns false.
    pub fn subscribe_while<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&ElevatorState) -> bool + 'static,
    {
        if callback(&self.state) {
            self.add_observer(Observer::Retained(Box::new(callback)))
        } else {
            self.reserve_subscription()
        }
    }

    /// Channel flavour of `subscribe`. The current state is queued immediately.
    pub fn watch(&mut self) -> cbc::Receiver<ElevatorState> {
        let (state_tx, state_rx) = cbc::unbounded::<ElevatorState>();
        let _ = state_tx.send(self.state.clone());
        self.add_observer(Observer::Channel(state_tx));
        state_rx
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Requests travel to `floor_id`. Unknown floors and the current floor are ignored.
    pub fn go_to_floor(&mut self, floor_id: &str) {
        if let Err(e) = self.try_go_to_floor(floor_id) {
            debug!("Ignoring request: {}", e);
        }
    }

    pub fn try_go_to_floor(&mut self, floor_id: &str) -> Result<(), StoreError> {
        let target = self
            .registry
            .find(floor_id)
            .ok_or_else(|| StoreError::FloorNotFound(floor_id.to_string()))?;

        if target.id == self.state.current_floor.id {
            return Err(StoreError::AlreadyAtFloor(floor_id.to_string()));
        }

        let target = target.clone();
        self.handle_event(Event::Departure(target));
        Ok(())
    }

    pub fn arrive_at_floor(&mut self) {
        if self.state.target_floor.is_none() {
            debug!("Ignoring arrival: no target floor");
            return;
        }
        self.handle_event(Event::Arrival);
    }

    /// Opens the doors. This is allowed while the elevator is moving.
    pub fn open_doors(&mut self) {
        self.handle_event(Event::DoorsOpened);
    }

    pub fn close_doors(&mut self) {
        self.handle_event(Event::DoorsClosed);
    }

    pub fn reset(&mut self) {
        self.handle_event(Event::Reset);
    }

    pub fn dispatch(&mut self, action: &Action) {
        match action {
            Action::GoTo(floor_id) => self.go_to_floor(floor_id),
            Action::Arrive => self.arrive_at_floor(),
            Action::OpenDoors => self.open_doors(),
            Action::CloseDoors => self.close_doors(),
            Action::Reset => self.reset(),
        }
    }

    /// Number of registered callbacks and watchers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn reserve_subscription(&mut self) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        id
    }

    fn add_observer(&mut self, observer: Observer) -> SubscriptionId {
        let id = self.reserve_subscription();
        self.observers.push((id, observer));
        id
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Departure(target) => {
                // Direction is fixed here and not recomputed while travelling
                let direction = Direction::between(&self.state.current_floor, &target);
                info!(
                    "Departing {} for {} ({})",
                    self.state.current_floor.id, target.id, direction
                );
                self.state.target_floor = Some(target);
                self.state.is_moving = true;
                self.state.doors_open = false;
                self.state.direction = direction;
            }
            Event::Arrival => {
                if let Some(target) = self.state.target_floor.take() {
                    info!("Arrived at {}", target.id);
                    self.state.current_floor = target;
                }
                self.state.is_moving = false;
                self.state.direction = Direction::Idle;
            }
            Event::DoorsOpened => {
                debug!("Doors open at {}", self.state.current_floor.id);
                self.state.doors_open = true;
            }
            Event::DoorsClosed => {
                debug!("Doors closed at {}", self.state.current_floor.id);
                self.state.doors_open = false;
            }
            Event::Reset => {
                info!("Resetting to {}", self.registry.first().id);
                self.state = ElevatorState::new(self.registry.first().clone());
            }
        }

        self.notify();
    }

    fn notify(&mut self) {
        let state = &self.state;
        self.observers.retain_mut(|(_, observer)| match observer {
            Observer::Callback(callback) => {
                callback(state);
                true
            }
            Observer::Retained(callback) => callback(state),
            // Drop watchers whose receiver is gone
            Observer::Channel(state_tx) => state_tx.send(state.clone()).is_ok(),
        });
    }
}
