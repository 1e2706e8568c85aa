//! Shared support declarations, emitted once per run before all per-spec
//! declaration groups.

use serde_json::json;

use crate::error::Result;
use crate::naming;
use crate::spec::ErrorSpec;
use crate::template::ParsedTemplate;
use crate::templates::embedded;

use super::Generator;

pub(crate) fn emit(g: &mut Generator, specs: &[ErrorSpec]) -> Result<()> {
    let header = render_header(g)?;
    g.section(&header);

    let err_wrap = g.renderer().render(embedded::ERR_WRAP, &json!({}))?;
    g.section(&err_wrap);

    if g.config().compat_is {
        let stub = g.renderer().render(
            embedded::COMPAT_STUB,
            &json!({ "sentinel": g.config().sentinel_type }),
        )?;
        g.section(&stub);
    } else {
        let search = render_is_in(g, specs)?;
        g.section(&search);
    }
    Ok(())
}

fn render_header(g: &Generator) -> Result<String> {
    let mut imports: Vec<String> = vec!["std::error".to_string(), "std::fmt".to_string()];
    imports.extend(g.config().extra_imports.iter().cloned());
    imports.sort();
    imports.dedup();
    let lines: Vec<String> = imports.iter().map(|path| format!("use {path};")).collect();
    g.renderer()
        .render(embedded::HEADER, &json!({ "imports": lines.join("\n") }))
}

/// Chain search needs one capability-probe arm per wrapping generated type;
/// the set is closed and known up front, in spec order.
fn render_is_in(g: &Generator, specs: &[ErrorSpec]) -> Result<String> {
    let config = g.config();
    let mut arms = String::new();
    for spec in specs {
        let template = ParsedTemplate::parse(&spec.template)?;
        if !template.wraps() {
            continue;
        }
        let type_name = naming::type_name(&spec.name, config.make_public, &config.suffix_to_trim);
        arms.push_str(&format!(
            "    if let Some(e) = err.downcast_ref::<{type_name}>() {{\n        \
             return Some(e);\n    \
             }}\n"
        ));
    }
    let err_param = if arms.is_empty() { "_err" } else { "err" };
    let vis = if config.make_public { "pub " } else { "" };
    g.renderer().render(
        embedded::IS_IN,
        &json!({
            "sentinel": config.sentinel_type,
            "vis": vis,
            "err_param": err_param,
            "probe_arms": arms,
        }),
    )
}
