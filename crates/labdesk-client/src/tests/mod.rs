mod normalize;
mod query;
