#[cfg(test)]
mod common;


#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod row_filter_tests;
