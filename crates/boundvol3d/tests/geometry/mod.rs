mod aabb_queries;
mod bounding_sphere_queries;
mod frustum_culling;
mod obb_fit;
mod obb_sat;
mod volumes_cascade;
mod volumes_pack;
mod volumes_ray_cast;
