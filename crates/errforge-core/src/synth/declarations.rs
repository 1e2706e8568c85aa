//! Per-spec declaration groups: type, constructor, message formatter, cause
//! attachment, identity predicate — emitted in that fixed order.

use crate::error::Result;
use crate::naming;
use crate::spec::{ErrorSpec, GeneratorConfig};
use crate::template::{Member, ParsedTemplate, WrapMode};

use super::verbs;
use super::Generator;

/// The generic failure-value type carried by cause holders.
const BOX_DYN_ERROR: &str = "Box<dyn error::Error + 'static>";

pub(crate) fn emit(g: &mut Generator, spec: &ErrorSpec) -> Result<()> {
    let config = g.config().clone();
    let template = ParsedTemplate::parse(&spec.template)?;
    let members = template.members()?;
    let type_name = naming::type_name(&spec.name, config.make_public, &config.suffix_to_trim);
    let ctor_name = naming::constructor_name(&type_name, config.make_public);
    let vis = if config.make_public { "pub " } else { "" };

    g.section(&struct_decl(vis, &type_name, &template, &members));
    g.section(&constructor(vis, &type_name, &ctor_name, &template, &members));
    g.section(&display_impl(&type_name, &template));
    g.section(&error_impl(&type_name, &template));
    if template.wraps() {
        g.section(&wrap_impl(vis, &type_name));
    }
    g.section(&is_impl(vis, &type_name, &spec.name, &config, &template));
    Ok(())
}

/// Map a template type expression onto the Rust surface: dotted paths become
/// `::` paths, a leading `*` becomes owned boxed data.
fn render_type(ty: &str) -> String {
    match ty.strip_prefix('*') {
        Some(rest) => format!("Box<{}>", rest.replace('.', "::")),
        None => ty.replace('.', "::"),
    }
}

fn struct_decl(vis: &str, type_name: &str, template: &ParsedTemplate, members: &[Member]) -> String {
    let mut out = String::new();
    out.push_str("#[derive(Debug)]\n");
    if !template.wraps() && members.is_empty() {
        out.push_str(&format!("{vis}struct {type_name} {{}}\n"));
        return out;
    }
    out.push_str(&format!("{vis}struct {type_name} {{\n"));
    if template.wraps() {
        out.push_str("    wrap: ErrWrap,\n");
    }
    for member in members {
        out.push_str(&format!(
            "    {}: {},\n",
            member.name,
            render_type(&member.ty)
        ));
    }
    out.push_str("}\n");
    out
}

fn constructor(
    vis: &str,
    type_name: &str,
    ctor_name: &str,
    template: &ParsedTemplate,
    members: &[Member],
) -> String {
    let mut params: Vec<String> = members
        .iter()
        .map(|m| format!("{}: {}", m.name, render_type(&m.ty)))
        .collect();
    if template.wrap == WrapMode::Required {
        params.push(format!("cause: {BOX_DYN_ERROR}"));
    }

    let mut inits: Vec<String> = Vec::new();
    match template.wrap {
        WrapMode::Optional => inits.push("wrap: ErrWrap::new(None)".to_string()),
        WrapMode::Required => inits.push("wrap: ErrWrap::new(Some(cause))".to_string()),
        WrapMode::Forbidden => {}
    }
    inits.extend(members.iter().map(|m| m.name.clone()));

    let mut out = String::new();
    out.push_str(&format!(
        "{vis}fn {ctor_name}({}) -> {type_name} {{\n",
        params.join(", ")
    ));
    if inits.is_empty() {
        out.push_str(&format!("    {type_name} {{}}\n"));
    } else {
        out.push_str(&format!("    {type_name} {{\n"));
        for init in &inits {
            out.push_str(&format!("        {init},\n"));
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");
    out
}

fn display_impl(type_name: &str, template: &ParsedTemplate) -> String {
    let fmt_str = verbs::display_format(template.segments());
    let args: Vec<String> = template
        .fields
        .iter()
        .map(|f| format!("self.{}", f.accessor))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("impl fmt::Display for {type_name} {{\n"));
    out.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    match template.wrap {
        WrapMode::Forbidden => {
            out.push_str(&format!(
                "        write!(f, {})\n",
                write_args(&fmt_str, &args)
            ));
        }
        WrapMode::Optional => {
            let with_cause = format!("{fmt_str}: {{}}");
            let mut cause_args = args.clone();
            cause_args.push("cause".to_string());
            out.push_str("        match self.wrap.cause() {\n");
            out.push_str(&format!(
                "            None => write!(f, {}),\n",
                write_args(&fmt_str, &args)
            ));
            out.push_str(&format!(
                "            Some(cause) => write!(f, {}),\n",
                write_args(&with_cause, &cause_args)
            ));
            out.push_str("        }\n");
        }
        WrapMode::Required => {
            let with_cause = format!("{fmt_str}: {{}}");
            let mut cause_args = args.clone();
            cause_args.push("cause".to_string());
            out.push_str("        let cause = self.wrap.cause().expect(\"cause is mandatory\");\n");
            out.push_str(&format!(
                "        write!(f, {})\n",
                write_args(&with_cause, &cause_args)
            ));
        }
    }
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn write_args(fmt_str: &str, args: &[String]) -> String {
    let lit = verbs::quote_str(fmt_str);
    if args.is_empty() {
        lit
    } else {
        format!("{lit}, {}", args.join(", "))
    }
}

fn error_impl(type_name: &str, template: &ParsedTemplate) -> String {
    if template.wraps() {
        format!(
            "impl error::Error for {type_name} {{\n    \
             fn source(&self) -> Option<&(dyn error::Error + 'static)> {{\n        \
             self.wrap.cause()\n    \
             }}\n\
             }}\n"
        )
    } else {
        format!("impl error::Error for {type_name} {{}}\n")
    }
}

fn wrap_impl(vis: &str, type_name: &str) -> String {
    format!(
        "impl {type_name} {{\n    \
         {vis}fn wrap(mut self, cause: {BOX_DYN_ERROR}) -> Self {{\n        \
         self.wrap.set(cause);\n        \
         self\n    \
         }}\n\
         }}\n"
    )
}

fn is_impl(
    vis: &str,
    type_name: &str,
    spec_name: &str,
    config: &GeneratorConfig,
    template: &ParsedTemplate,
) -> String {
    let sentinel = &config.sentinel_type;
    if config.compat_is {
        format!(
            "impl {type_name} {{\n    \
             {vis}fn is(&self, e: &(dyn error::Error + 'static)) -> bool {{\n        \
             e.downcast_ref::<{sentinel}>().map_or(false, |e| *e == {spec_name})\n    \
             }}\n\
             }}\n"
        )
    } else if template.wraps() {
        format!(
            "impl Causal for {type_name} {{\n    \
             fn is(&self, e: {sentinel}) -> bool {{\n        \
             e == {spec_name}\n    \
             }}\n\n    \
             fn unwrap_cause(&self) -> Option<&(dyn error::Error + 'static)> {{\n        \
             self.wrap.cause()\n    \
             }}\n\
             }}\n"
        )
    } else {
        format!(
            "impl {type_name} {{\n    \
             {vis}fn is(&self, e: {sentinel}) -> bool {{\n        \
             e == {spec_name}\n    \
             }}\n\
             }}\n"
        )
    }
}
