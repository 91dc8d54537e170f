use crate::bench_scripts;
use crate::error::BenchResult;
use mlua::{Function, Lua};
use std::hint::black_box;

/// Lua heap limit for the benchmark VM: 1 MB. The variants allocate next to nothing.
pub const LUA_MEMORY_LIMIT_BYTES: usize = 1024 * 1024;

/// Sandboxed Luau state with `print` swallowed so scripts cannot do I/O while timed.
pub fn create_lua_state() -> BenchResult<Lua> {
    let lua = Lua::new();
    lua.sandbox(true)?;

    let silent_print = lua.create_function(|_, _args: mlua::Variadic<mlua::Value>| Ok(()))?;
    lua.globals().set("print", silent_print)?;

    Ok(lua)
}

/// The two Lua variants compiled into functions, ready to be called per invocation.
pub struct LuaWorkload {
    // Keeps the state alive for the functions below.
    _lua: Lua,
    recompute: Function,
    hoisted: Function,
    inner_loop: f64,
    input: f64,
}

impl LuaWorkload {
    pub fn new(inner_loop: u64, input: f64) -> BenchResult<Self> {
        Self::from_sources(bench_scripts::RECOMPUTE, bench_scripts::HOISTED, inner_loop, input)
    }

    /// Each source must evaluate to a function `(n, x) -> number`.
    pub fn from_sources(
        recompute_src: &str,
        hoisted_src: &str,
        inner_loop: u64,
        input: f64,
    ) -> BenchResult<Self> {
        let lua = create_lua_state()?;
        let recompute: Function = lua.load(recompute_src).set_name("recompute").eval()?;
        let hoisted: Function = lua.load(hoisted_src).set_name("hoisted").eval()?;
        lua.set_memory_limit(LUA_MEMORY_LIMIT_BYTES)?;

        Ok(Self {
            _lua: lua,
            recompute,
            hoisted,
            inner_loop: inner_loop as f64,
            input,
        })
    }

    pub fn call_recompute(&self) -> BenchResult<f64> {
        Ok(self.recompute.call::<f64>((self.inner_loop, self.input))?)
    }

    pub fn call_hoisted(&self) -> BenchResult<f64> {
        Ok(self.hoisted.call::<f64>((self.inner_loop, self.input))?)
    }

    pub fn run_recompute(&self) -> BenchResult<()> {
        black_box(self.call_recompute()?);
        Ok(())
    }

    pub fn run_hoisted(&self) -> BenchResult<()> {
        black_box(self.call_hoisted()?);
        Ok(())
    }
}
