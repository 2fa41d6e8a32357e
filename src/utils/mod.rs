pub mod amount;
pub mod config_loader;
pub mod constants;

pub use amount::{compute_price, format_bip, parse_pip, pip_to_bip, volume_in_bip};
pub use config_loader::*;
pub use constants::*;

use ahash::RandomState;
use std::collections::{HashMap, HashSet};

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;
/// FastHashSet using ahash
pub type FastHashSet<T> = HashSet<T, FastHasher>;
