//Seed for the generator built when a caller doesn't supply one
pub const DEFAULT_SEED : u64 = 42;

//Smallest batch the `parallel` feature fans out over threads;
//anything smaller is factored and transformed sequentially
pub const PARALLEL_BATCH_THRESHOLD : usize = 64;
