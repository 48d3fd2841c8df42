//! VueInstanceInspector unit tests

use serde_json::json;
use std::sync::Arc;

use super::VueInstanceInspector;
use crate::page::MockPage;
use crate::vue::ElementHandle;

fn item_handle() -> ElementHandle {
    ElementHandle {
        ref_index: 2,
        tag: "item".to_string(),
    }
}

fn page_with_item() -> Arc<MockPage> {
    let page = Arc::new(MockPage::with_vue("2.6.14"));
    page.register_instance(
        2,
        json!({
            "props": { "label": "milk", "checked": false },
            "data": {
                "label": "shadowed",
                "editing": true,
                "draft": "mil",
                "cartTotal": 3
            },
            "computed": { "display": "milk (pending)" },
            "prop_names": ["label", "checked"],
            "store_getters": ["cartTotal"]
        }),
    );
    page
}

#[tokio::test]
async fn test_prop_value() {
    let inspector = VueInstanceInspector::new(page_with_item());
    let element = item_handle();

    assert_eq!(
        inspector.prop_value(&element, "label").await.unwrap(),
        Some(json!("milk"))
    );
    assert_eq!(
        inspector.prop_value(&element, "checked").await.unwrap(),
        Some(json!(false))
    );
    assert_eq!(inspector.prop_value(&element, "missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_state_value_excludes_props_and_getters() {
    let inspector = VueInstanceInspector::new(page_with_item());
    let element = item_handle();

    assert_eq!(
        inspector.state_value(&element, "editing").await.unwrap(),
        Some(json!(true))
    );
    assert_eq!(
        inspector.state_value(&element, "draft").await.unwrap(),
        Some(json!("mil"))
    );

    // Declared prop and vuex getter keys never surface as state
    assert_eq!(inspector.state_value(&element, "label").await.unwrap(), None);
    assert_eq!(
        inspector.state_value(&element, "cartTotal").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_computed_value() {
    let inspector = VueInstanceInspector::new(page_with_item());
    let element = item_handle();

    assert_eq!(
        inspector.computed_value(&element, "display").await.unwrap(),
        Some(json!("milk (pending)"))
    );
    assert_eq!(
        inspector.computed_value(&element, "editing").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_inspecting_plain_dom_node_yields_none() {
    // No instance registered for this reference: a plain DOM node.
    let page = Arc::new(MockPage::with_vue("2.6.14"));
    let inspector = VueInstanceInspector::new(page);
    let element = ElementHandle {
        ref_index: 9,
        tag: "div".to_string(),
    };

    assert_eq!(inspector.prop_value(&element, "label").await.unwrap(), None);
    assert_eq!(inspector.state_value(&element, "editing").await.unwrap(), None);
    assert_eq!(
        inspector.computed_value(&element, "display").await.unwrap(),
        None
    );
}
