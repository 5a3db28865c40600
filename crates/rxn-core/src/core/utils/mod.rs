pub mod multiset;
