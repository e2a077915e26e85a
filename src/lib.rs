pub mod config {
    pub mod config;
    pub mod fetch_arguments;
}

pub mod elevator {
    pub mod elevator;
    pub mod elevator_fsm;
    pub mod orders;
    pub mod state;
}

pub mod cost_function {
    pub mod cost_function;
}

pub mod distributor {
    pub mod all_orders;
    pub mod distributor;
    pub mod run_loop;
}

pub mod display {
    pub mod legend;
    pub mod pictograms;
    pub mod printer;
}

pub mod error;
pub mod logger;
