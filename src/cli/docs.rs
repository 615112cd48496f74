//! Operator reference for the csquery CLI

use crate::Operator;

/// Get the operator reference (operators and the options each accepts)
pub fn get_operators_overview() -> String {
    let mut out = String::from("CSQUERY OPERATORS\n\n");

    for op in Operator::ALL {
        out.push_str(&format!(
            "  {:<10}options: {}\n",
            op.name(),
            op.allowed_options().join(", ")
        ));
    }

    out.push_str(
        r#"
Named arguments that are listed as options render as key=value after the
operator, in the order shown. All other named arguments render as fields,
sorted by name.

QUERY DOCUMENTS

  {"op": "and", "args": [...], "kwargs": {...}}
  "text"            quoted literal ('text')
  2000              number
  [1990, 2000]      range ([1990,2000]); null or "" leaves an end open
  {"title": "star"} positional field (title:'star'), args only

Operators not listed above are rendered as given and take an "options" object.
"#,
    );
    out
}
