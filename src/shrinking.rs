/// Shrinking-generator decimation: keeps `data[i]` wherever `control[i]` is 1.
///
/// Streams of different lengths are paired up to the shorter one.
pub fn combine(data: &[u8], control: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(control)
        .filter(|&(_, &s)| s == 1)
        .map(|(&a, _)| a)
        .collect()
}
