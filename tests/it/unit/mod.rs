mod roll;
mod timing;
