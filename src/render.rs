//! Boolean expression rendering
//!
//! Turns selected covers into expression strings. A minterm-based cover is a
//! sum of products: literals concatenate inside each group and groups join
//! with `" + "`. A maxterm-based cover is a product of sums: literals join
//! with `" + "` inside each group and groups concatenate. Negation is the
//! `'` suffix, applied to `0` positions in products and `1` positions in
//! sums; dashed positions are omitted entirely, so an all-dash implicant
//! renders as `()`.

/// Render one cover against the variable alphabet.
///
/// Callers guarantee `vars` has a name for every position of every
/// implicant.
pub(crate) fn render_cover(
    cover: &[String],
    vars: &[String],
    dc: char,
    maxterm_based: bool,
) -> String {
    if maxterm_based {
        cover
            .iter()
            .map(|imp| render_sum(imp, vars, dc))
            .collect::<Vec<_>>()
            .concat()
    } else {
        cover
            .iter()
            .map(|imp| render_product(imp, vars, dc))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Render every cover in order.
pub(crate) fn render_covers(
    covers: &[Vec<String>],
    vars: &[String],
    dc: char,
    maxterm_based: bool,
) -> Vec<String> {
    covers
        .iter()
        .map(|cover| render_cover(cover, vars, dc, maxterm_based))
        .collect()
}

fn render_product(implicant: &str, vars: &[String], dc: char) -> String {
    let mut out = String::from("(");
    for (i, c) in implicant.chars().enumerate() {
        if c == dc {
            continue;
        }
        out.push_str(&vars[i]);
        if c == '0' {
            out.push('\'');
        }
    }
    out.push(')');
    out
}

fn render_sum(implicant: &str, vars: &[String], dc: char) -> String {
    let mut literals: Vec<String> = Vec::new();
    for (i, c) in implicant.chars().enumerate() {
        if c == dc {
            continue;
        }
        let mut lit = vars[i].clone();
        if c == '1' {
            lit.push('\'');
        }
        literals.push(lit);
    }
    format!("({})", literals.join(" + "))
}
