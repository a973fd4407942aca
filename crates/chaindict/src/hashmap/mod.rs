mod dict;
mod hash_table;
mod primes;
mod set;

pub use dict::HashDict;
pub use hash_table::{IntoIter, Iter};
pub use primes::is_prime;
pub use set::{HashSet, SetIntoIter, SetIter};
