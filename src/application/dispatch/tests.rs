//! Unit tests for the trigger registry and dispatcher

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::application::dispatch::{Outbox, TriggerDispatcher};
    use crate::application::errors::TriggerError;
    use crate::domain::entities::TriggerRegistry;

    #[test]
    fn registry_starts_empty_and_grows_on_register() {
        let mut registry = TriggerRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("hi"));

        registry.register("hi", || Ok(()));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("hi"));
        assert_eq!(registry.handler_count("hi"), 1);
        assert_eq!(registry.handler_count("bye"), 0);
    }

    #[test]
    fn registry_appends_in_registration_order() {
        let mut registry = TriggerRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let calls = Arc::clone(&calls);
            registry.register("go", move || {
                calls.lock().unwrap().push(tag);
                Ok(())
            });
        }

        for handler in registry.handlers_mut("go").unwrap() {
            handler().unwrap();
        }

        assert_eq!(*calls.lock().unwrap(), ["first", "second", "third"]);
    }

    #[test]
    fn dispatch_runs_handlers_in_order_every_time() {
        let (outbox, _rx) = Outbox::channel();
        let mut dispatcher = TriggerDispatcher::new(outbox);
        let calls = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b"] {
            let calls = Arc::clone(&calls);
            dispatcher.register("go", move || {
                calls.lock().unwrap().push(tag);
                Ok(())
            });
        }

        dispatcher.dispatch("go").unwrap();
        dispatcher.dispatch("go").unwrap();

        assert_eq!(*calls.lock().unwrap(), ["a", "b", "a", "b"]);
    }

    #[test]
    fn duplicate_registration_runs_twice_per_dispatch() {
        let (outbox, _rx) = Outbox::channel();
        let mut dispatcher = TriggerDispatcher::new(outbox);
        let count = Arc::new(Mutex::new(0));

        for _ in 0..2 {
            let count = Arc::clone(&count);
            dispatcher.register("ping", move || {
                *count.lock().unwrap() += 1;
                Ok(())
            });
        }

        dispatcher.dispatch("ping").unwrap();
        assert_eq!(*count.lock().unwrap(), 2);

        dispatcher.dispatch("ping").unwrap();
        assert_eq!(*count.lock().unwrap(), 4);
    }

    #[test]
    fn unknown_trigger_queues_notice_and_runs_no_handler() {
        let (outbox, mut rx) = Outbox::channel();
        let mut dispatcher = TriggerDispatcher::new(outbox);
        let called = Arc::new(Mutex::new(false));

        let flag = Arc::clone(&called);
        dispatcher.register("hi", move || {
            *flag.lock().unwrap() = true;
            Ok(())
        });

        dispatcher.dispatch("xyz").unwrap();

        assert_eq!(rx.try_recv().unwrap(), "sorry, I don't understand xyz");
        assert!(rx.try_recv().is_err());
        assert!(!*called.lock().unwrap());
    }

    #[test]
    fn known_trigger_emits_no_extra_framing() {
        let (outbox, mut rx) = Outbox::channel();
        let mut dispatcher = TriggerDispatcher::new(outbox.clone());

        dispatcher.register("hi", move || {
            outbox.say("Hello!");
            Ok(())
        });

        dispatcher.dispatch("hi").unwrap();

        assert_eq!(rx.try_recv().unwrap(), "Hello!");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn handler_error_propagates_and_stops_later_handlers() {
        let (outbox, _rx) = Outbox::channel();
        let mut dispatcher = TriggerDispatcher::new(outbox);
        let reached = Arc::new(Mutex::new(false));

        dispatcher.register("boom", || {
            Err(TriggerError::ExecutionFailed("broken handler".to_string()))
        });
        let flag = Arc::clone(&reached);
        dispatcher.register("boom", move || {
            *flag.lock().unwrap() = true;
            Ok(())
        });

        let err = dispatcher.dispatch("boom").unwrap_err();
        assert!(matches!(err, TriggerError::ExecutionFailed(_)));
        assert!(!*reached.lock().unwrap());
    }
}
