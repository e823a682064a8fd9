// Engine modules: fixed-timestep driver

pub mod game_loop;
