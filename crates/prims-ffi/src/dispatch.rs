//! Generic dispatch and logging setup
//!
//! `prims_call` reaches every primitive through the table in `prims-core`,
//! with arguments and result encoded as JSON in the host value layout.

use crate::{into_c_string, read_str, reject, Result};
use libc::{c_char, c_int};
use prims_core::Value;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// JSON has no NaN or infinities; send them as the host's number strings.
fn encode_non_finite(value: Value) -> Value {
    match value {
        Value::Float(n) if !n.is_finite() => Value::Str(Value::Float(n).to_host_string()),
        other => other,
    }
}

fn call_json(name: &str, args_json: &str) -> Result<String> {
    let args: Vec<Value> = serde_json::from_str(args_json)?;
    let result = prims_core::call(name, &args)?.map_scalars(&encode_non_finite);
    Ok(serde_json::to_string(&result)?)
}

/// Call primitive `name` with a JSON array of arguments.
///
/// Returns the JSON-encoded result, to be released with `prims_string_free`,
/// or null if the name is unknown, the arguments don't fit the primitive, or
/// the input can't be read. Optional results use the host layout
/// `[null,"Option","Some",v]` / `[null,"Option","None"]`. Non-finite floats,
/// including the NaN failure value, are encoded as `"NaN"`, `"Infinity"` and
/// `"-Infinity"`.
///
/// # Safety
/// `name` and `args_json` must each be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_call(name: *const c_char, args_json: *const c_char) -> *mut c_char {
    let call = || -> Result<*mut c_char> {
        let name = read_str(name, "name")?;
        let args_json = read_str(args_json, "args_json")?;
        into_c_string(&call_json(name, args_json)?)
    };
    call().unwrap_or_else(|e| reject("prims_call", e, std::ptr::null_mut()))
}

/// Install a `tracing` subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` directive syntax (e.g. `"prims_core=debug"`);
/// null or unparsable input falls back to `warn`. Returns 0 on success and
/// -1 if a global subscriber is already installed.
///
/// # Safety
/// `filter` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_log_init(filter: *const c_char) -> c_int {
    let filter = read_str(filter, "filter")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
