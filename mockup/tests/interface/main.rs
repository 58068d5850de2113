mod by_ref;
mod constructor_with_args;
mod drop_state;
mod no_default;
mod sequence;
mod stubbing;
mod throws;
