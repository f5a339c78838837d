// Jobs API: the requisitions the ranker scores candidates against.

pub mod handlers;
