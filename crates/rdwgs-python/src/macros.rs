/// Generate a frozen `#[pyclass]` holding one numpy column per coordinate
/// component of a core `*Batch`, plus an `error_codes` int32 column.
///
/// Also generates `from_batch()`, which copies each column of the core batch
/// into a fresh numpy array.
macro_rules! define_batch_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($column:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $column: Py<numpy::PyArray1<f64>>,
            )+
            #[pyo3(get)]
            pub error_codes: Py<numpy::PyArray1<i32>>,
            #[pyo3(get)]
            pub out_of_range: usize,
        }

        impl $name {
            pub fn from_batch(py: pyo3::Python<'_>, batch: &$core_type) -> Self {
                Self {
                    $(
                        $column: numpy::PyArray1::from_slice(py, batch.$column()).unbind(),
                    )+
                    error_codes: numpy::PyArray1::from_slice(py, batch.error_codes()).unbind(),
                    out_of_range: batch.out_of_range_count(),
                }
            }
        }
    };
}
