//! In-page JavaScript generation
//!
//! Every script evaluated on the page comes from this module. The scripts
//! are mechanical serializers and registrars with no decision-making; the
//! resolution and filtering decisions stay on the Rust side. Each script is
//! an IIFE returning a JSON string and carries a distinct banner comment so
//! test doubles can dispatch on it.

/// Banner carried by the probe script
pub const PROBE_BANNER: &str = "/* vue-lens:probe */";

/// Banner carried by the tree capture script
pub const CAPTURE_BANNER: &str = "/* vue-lens:capture */";

/// Banner carried by the structural fallback script
pub const STRUCTURAL_BANNER: &str = "/* vue-lens:structural */";

/// Banner carried by the instance inspect script
pub const INSPECT_BANNER: &str = "/* vue-lens:inspect */";

/// In-page global holding element references between evaluations
const REFS_GLOBAL: &str = "__VUE_LENS_REFS__";

/// Escape a string for safe use inside a single-quoted JavaScript literal
pub fn escape_js_str(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', r#"\""#)
}

/// Build the framework probe script
///
/// Reports whether the Vue global is present and which version it carries.
pub fn probe_script() -> String {
    format!(
        r#"{banner}
(() => {{
    if (!window.Vue)
        return JSON.stringify({{ detected: false, version: null }});
    return JSON.stringify({{ detected: true, version: String(window.Vue.version || '') }});
}})()"#,
        banner = PROBE_BANNER
    )
}

/// Build the tree capture script
///
/// Serializes the DOM tree from the document down, attaching the component
/// subtree wherever a node carries a `__vue__` back-reference. Every
/// component's `$el` is registered in the reference registry and its index
/// recorded, so later scripts can address the element. DOM descent is
/// pruned below instance-carrying nodes; a pre-order first-hit scan never
/// looks below an earlier hit.
pub fn capture_tree_script() -> String {
    format!(
        r#"{banner}
(() => {{
    const refs = window.{refs} = [];

    function register (el) {{
        refs.push(el);
        return refs.length - 1;
    }}

    function componentTag (instance) {{
        const options = instance.$options || {{}};
        return options.name || options._componentTag || options.__file || '';
    }}

    function component (instance) {{
        const node = {{
            tag: componentTag(instance),
            ref_index: register(instance.$el),
            children: []
        }};
        const children = instance.$children || [];
        for (let i = 0; i < children.length; i++)
            node.children.push(component(children[i]));
        return node;
    }}

    function dom (node) {{
        const out = {{ instance: null, children: [] }};
        if (node.__vue__) {{
            out.instance = component(node.__vue__);
            return out;
        }}
        const children = node.childNodes || [];
        for (let i = 0; i < children.length; i++)
            out.children.push(dom(children[i]));
        return out;
    }}

    return JSON.stringify(dom(document));
}})()"#,
        banner = CAPTURE_BANNER,
        refs = REFS_GLOBAL
    )
}

/// Build the structural fallback script
///
/// A plain CSS query for pages without Vue; all nodes when no selector is
/// given. Matched elements are registered so they stay addressable.
pub fn structural_query_script(selector: Option<&str>) -> String {
    let selector = match selector {
        Some(selector) if !selector.is_empty() => escape_js_str(selector),
        _ => "*".to_string(),
    };

    format!(
        r#"{banner}
(() => {{
    const refs = window.{refs} = [];
    const nodes = document.querySelectorAll('{selector}');
    const out = [];
    for (let i = 0; i < nodes.length; i++) {{
        refs.push(nodes[i]);
        out.push({{ ref_index: i, tag: (nodes[i].tagName || '').toLowerCase() }});
    }}
    return JSON.stringify(out);
}})()"#,
        banner = STRUCTURAL_BANNER,
        refs = REFS_GLOBAL,
        selector = selector
    )
}

/// Build the instance inspect script for one registered element
///
/// Serializes the raw prop/data/computed bags of the instance attached to
/// the element, or JSON `null` when the element carries no instance.
/// `prop_names` mirrors `_props`-or-options-props keys and `store_getters`
/// the vuex getter keys; both feed the Rust-side state filter.
pub fn inspect_script(ref_index: usize) -> String {
    format!(
        r#"{banner}
(() => {{
    const refs = window.{refs} || [];
    const el = refs[{ref_index}];
    const instance = el && el.__vue__;
    if (!instance)
        return JSON.stringify(null);

    const options = instance.$options || {{}};

    const props = {{}};
    Object.keys(options.props || {{}}).forEach(key => {{ props[key] = instance[key]; }});

    const computed = {{}};
    Object.keys(options.computed || {{}}).forEach(key => {{ computed[key] = instance[key]; }});

    const data = {{}};
    Object.keys(instance._data || {{}}).forEach(key => {{ data[key] = instance._data[key]; }});

    const propNames = Object.keys(instance._props || options.props || {{}});
    const storeGetters = options.vuex && options.vuex.getters
        ? Object.keys(options.vuex.getters)
        : null;

    return JSON.stringify({{
        props: props,
        data: data,
        computed: computed,
        prop_names: propNames,
        store_getters: storeGetters
    }});
}})()"#,
        banner = INSPECT_BANNER,
        refs = REFS_GLOBAL,
        ref_index = ref_index
    )
}
