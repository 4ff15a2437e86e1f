use kelpie::protocol::{
    ConstraintNotification, DeleteConstraint, SetPositionConstraint, SetStaticConstraint,
};
use serde_json::json;

#[test]
fn static_constraint_serializes_in_camel_case() {
    let notification = ConstraintNotification::SetStatic(SetStaticConstraint {
        uri: "file:///proj/model.graph".to_string(),
        node_id: "n3".to_string(),
        layer: 2,
        adjusted_layer: 4,
        position: 1,
        adjusted_position: 1,
    });

    assert_eq!(notification.method(), "constraints/setStaticConstraint");
    assert_eq!(
        notification.payload(),
        json!({
            "uri": "file:///proj/model.graph",
            "nodeId": "n3",
            "layer": 2,
            "adjustedLayer": 4,
            "position": 1,
            "adjustedPosition": 1,
        })
    );
}

#[test]
fn position_constraint_serializes_in_camel_case() {
    let notification = ConstraintNotification::SetPosition(SetPositionConstraint {
        uri: "file:///proj/model.graph".to_string(),
        node_id: "n3".to_string(),
        position: 0,
        adjusted_position: 2,
    });

    assert_eq!(notification.method(), "constraints/setPositionConstraint");
    assert_eq!(
        notification.payload(),
        json!({
            "uri": "file:///proj/model.graph",
            "nodeId": "n3",
            "position": 0,
            "adjustedPosition": 2,
        })
    );
}

#[test]
fn refresh_payload_is_the_bare_uri() {
    let notification = ConstraintNotification::RefreshLayout {
        uri: "file:///proj/model.graph".to_string(),
    };

    assert_eq!(notification.method(), "constraints/refreshLayout");
    assert_eq!(notification.payload(), json!("file:///proj/model.graph"));
}

#[test]
fn delete_constraint_round_trips() {
    let delete = DeleteConstraint {
        uri: "file:///proj/model.graph".to_string(),
        node_id: "n3".to_string(),
    };
    let notification = ConstraintNotification::DeleteStatic(delete.clone());

    assert_eq!(notification.method(), "constraints/deleteStaticConstraint");
    let value = notification.payload();
    assert_eq!(value, json!({ "uri": "file:///proj/model.graph", "nodeId": "n3" }));

    let back: DeleteConstraint = serde_json::from_value(value).unwrap();
    assert_eq!(back, delete);
}
