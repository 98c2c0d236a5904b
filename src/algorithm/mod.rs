/// Greedy first-fit chain construction
pub mod builder;
/// Exhaustive closed-chain enumeration by backtracking
pub mod enumerator;
/// Random tile set generation
pub mod generator;
/// Chain closure and adjacency validation
pub mod validator;
