mod ball_ball_gjk;
mod ball_ball_mpr;
mod f32_queries;
mod primitive_pairs;
mod randomized_symmetry;
