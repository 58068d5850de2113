mod invoke;
mod throw;
