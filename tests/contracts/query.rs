//! Query mode contracts
//!
//! - Internal names and `init` are never reachable by name
//! - Failed lookups answer `false`/`null`, they do not error
//! - `destroy` removes the instance from its dispatcher

use serde_json::{json, Value};

use dropmenu::{Dispatcher, DropmenuError, InstanceId};

use crate::common::*;

fn dispatcher() -> (Dispatcher, InstanceId) {
    let mut dispatcher = Dispatcher::new();
    let h = Harness::instant(instant_options(), fruit_items());
    let uid = dispatcher.register(h.dropdown);
    (dispatcher, uid)
}

/// CONTRACT: reserved names are refused before anything runs
#[test]
fn contract_reserved_names_are_refused() {
    let (mut dispatcher, uid) = dispatcher();

    for name in ["_build", "_init", "init"] {
        let result = dispatcher.query(&uid, name, &[]);
        assert!(
            matches!(result, Err(DropmenuError::ReservedCommand(_))),
            "'{}' must be refused",
            name
        );
    }
}

/// CONTRACT: an unknown command is an error, not a silent no-op
#[test]
fn contract_unknown_command_errors() {
    let (mut dispatcher, uid) = dispatcher();

    assert!(matches!(
        dispatcher.query(&uid, "explode", &[]),
        Err(DropmenuError::UnknownCommand(_))
    ));
}

/// CONTRACT: unknown references answer with falsy results
#[test]
fn contract_unknown_references_are_falsy() {
    let (mut dispatcher, uid) = dispatcher();

    assert_eq!(dispatcher.query(&uid, "select", &[json!("nope")]).unwrap(), json!(false));
    assert_eq!(dispatcher.query(&uid, "getItem", &[json!("nope")]).unwrap(), json!(false));
    assert_eq!(dispatcher.query(&uid, "text", &[json!("nope")]).unwrap(), Value::Null);
    assert_eq!(dispatcher.query(&uid, "selected", &[]).unwrap(), json!(false));
}

/// CONTRACT: an item id names the menu the item is shown in
#[test]
fn contract_get_menu_accepts_item_ids() {
    let (mut dispatcher, uid) = dispatcher();

    let menu = dispatcher.query(&uid, "getMenu", &[json!("lime")]).unwrap();
    assert_eq!(menu["parent"], json!("citrus"));

    let main = dispatcher.query(&uid, "getMenu", &[json!("apple")]).unwrap();
    assert_eq!(main, dispatcher.query(&uid, "getMenu", &[json!("main")]).unwrap());
}

/// CONTRACT: query results mirror the direct operations
#[test]
fn contract_query_matches_direct_calls() {
    let (mut dispatcher, uid) = dispatcher();

    assert_eq!(
        dispatcher.query(&uid, "selectByValue", &[json!(2)]).unwrap(),
        json!(true)
    );
    assert_eq!(dispatcher.query(&uid, "value", &[]).unwrap(), json!("2"));
    assert_eq!(dispatcher.query(&uid, "selected", &[]).unwrap(), json!(["banana"]));
    assert_eq!(dispatcher.query(&uid, "text", &[json!("banana")]).unwrap(), json!("Banana"));

    let direct = dispatcher.get(&uid).expect("registered").value();
    assert_eq!(serde_json::to_value(direct).unwrap(), json!("2"));
}

/// CONTRACT: a malformed argument is reported with the command name
#[test]
fn contract_bad_argument_names_command() {
    let (mut dispatcher, uid) = dispatcher();

    let err = dispatcher
        .query(&uid, "selectByValue", &[json!({ "value": 1 })])
        .unwrap_err();
    assert!(matches!(err, DropmenuError::InvalidArgument { ref command, .. } if command == "selectByValue"));
}

/// CONTRACT: destroy unregisters, later queries fail
#[test]
fn contract_destroy_unregisters() {
    let (mut dispatcher, uid) = dispatcher();

    assert_eq!(dispatcher.query(&uid, "destroy", &[]).unwrap(), json!(true));
    assert!(dispatcher.is_empty());
    assert!(matches!(
        dispatcher.query(&uid, "value", &[]),
        Err(DropmenuError::UnknownInstance(_))
    ));
}
