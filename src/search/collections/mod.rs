pub mod dijkstra_data;
pub mod vertex_cost_queue;
pub mod vertex_expanded_data;
