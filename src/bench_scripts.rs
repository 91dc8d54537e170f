//! Lua variants of the benchmark computation.
//! Each chunk evaluates to a function `(n, x) -> number` so it is compiled once and called per invocation.

/// Invariant `k = sqrt(x) * ln(x)` evaluated on every loop step.
/// Expected result for n = 1000: 500500 * k.
pub const RECOMPUTE: &str = r#"
return function(n, x)
    local acc = 0
    for i = 1, n do
        local k = math.sqrt(x) * math.log(x)
        acc = acc + i * k
    end
    return acc
end
"#;

/// Same sum with `k` computed once before the loop.
pub const HOISTED: &str = r#"
return function(n, x)
    local k = math.sqrt(x) * math.log(x)
    local acc = 0
    for i = 1, n do
        acc = acc + i * k
    end
    return acc
end
"#;
