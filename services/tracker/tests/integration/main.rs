mod media_test;
mod router_test;
