mod api;
mod export;
