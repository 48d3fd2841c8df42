//! Common test utilities
//!
//! Shared fixtures describing a small todo app the way the capture and
//! inspect scripts would serialize it:
//!
//! ```text
//! document
//! └── <div id="app">  (app)
//!     └── todo-list   (list)
//!         ├── todo-item (item, "milk")
//!         └── todo-item (item, "eggs")
//! ```

use serde_json::{json, Value};
use std::sync::{Arc, Once};
use vue_lens::page::MockPage;

static TRACING: Once = Once::new();

/// Install a test subscriber once, honoring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Registry indices assigned by the fixture tree, in capture order
pub const APP_REF: usize = 0;
pub const LIST_REF: usize = 1;
pub const ITEM_MILK_REF: usize = 2;
pub const ITEM_EGGS_REF: usize = 3;

/// The captured DOM/component tree of the fixture app
pub fn todo_tree() -> Value {
    json!({
        "instance": null,
        "children": [
            { "instance": null, "children": [] },
            {
                "instance": {
                    "tag": "app",
                    "ref_index": APP_REF,
                    "children": [
                        {
                            "tag": "list",
                            "ref_index": LIST_REF,
                            "children": [
                                { "tag": "item", "ref_index": ITEM_MILK_REF, "children": [] },
                                { "tag": "item", "ref_index": ITEM_EGGS_REF, "children": [] }
                            ]
                        }
                    ]
                },
                "children": []
            }
        ]
    })
}

/// The inspect-script bags of one todo item
pub fn item_instance(label: &str, checked: bool) -> Value {
    json!({
        "props": { "label": label, "checked": checked },
        "data": {
            "label": "shadowed by prop",
            "editing": false,
            "draft": label
        },
        "computed": { "display": format!("{} ({})", label, if checked { "done" } else { "open" }) },
        "prop_names": ["label", "checked"],
        "store_getters": null
    })
}

/// A mock page with the fixture app mounted and both items inspectable
pub fn mounted_todo_page() -> Arc<MockPage> {
    init_tracing();

    let page = Arc::new(MockPage::with_vue("2.6.14"));
    page.set_tree(todo_tree());
    page.register_instance(ITEM_MILK_REF, item_instance("milk", false));
    page.register_instance(ITEM_EGGS_REF, item_instance("eggs", true));
    page
}
