/// Glyph shown for a backslash command, or `None` when the command is unknown.
///
/// Formatting commands (`\text`, `\mathrm`, ...) map to an empty glyph so only
/// their braced argument remains. Sizing commands without a sensible glyph
/// (`\left`, `\frac`) keep their source spelling.
#[must_use]
pub fn symbol_for(command: &str) -> Option<&'static str> {
    let glyph = match command {
        "left" => "\\left",
        "right" => "\\right",
        "frac" => "\\frac",
        "lfloor" | "floor" => "⌊",
        "rfloor" => "⌋",
        "lceil" => "⌈",
        "rceil" => "⌉",
        "sqrt" => "√",
        "sum" => "∑",
        "prod" => "∏",
        "int" => "∫",
        "infty" => "∞",
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ε",
        "theta" => "θ",
        "lambda" => "λ",
        "mu" => "μ",
        "pi" => "π",
        "sigma" => "σ",
        "phi" => "φ",
        "omega" => "ω",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "equiv" => "≡",
        "approx" => "≈",
        "times" => "×",
        "div" => "÷",
        "pm" => "±",
        "mp" => "∓",
        "cdot" => "⋅",
        "bullet" => "- ",
        "cap" => "∩",
        "cup" => "∪",
        "subset" => "⊂",
        "supset" => "⊃",
        "subseteq" => "⊆",
        "supseteq" => "⊇",
        "in" => "∈",
        "notin" => "∉",
        "forall" => "∀",
        "exists" => "∃",
        "nabla" => "∇",
        "partial" => "∂",
        "emptyset" => "∅",
        "rightarrow" | "to" => "→",
        "leftarrow" => "←",
        "text" | "mathrm" | "mathbf" | "mathit" => "",
        "log" => "log",
        "ln" => "ln",
        "sin" => "sin",
        "cos" => "cos",
        "tan" => "tan",
        "min" => "min",
        "max" => "max",
        "gcd" => "gcd",
        "lcm" => "lcm",
        "dots" | "ldots" | "cdots" => "...",
        _ => return None,
    };
    Some(glyph)
}
