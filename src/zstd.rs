/// # Errors
pub fn compress(buf: &[u8], level: i32) -> crate::Result<Vec<u8>> {
    if buf.is_empty() {
        return Ok(vec![]);
    }
    let level = if (1..=zstd::zstd_safe::max_c_level()).contains(&level) {
        level
    } else {
        crate::DEFAULT_LEVEL
    };
    let mut dst = Vec::with_capacity(zstd::zstd_safe::compress_bound(buf.len()));
    zstd::zstd_safe::compress(&mut dst, buf, level).map_err(to_codec_error)?;
    Ok(dst)
}

/// # Errors
pub fn decompress(buf: &[u8], original_size: usize) -> crate::Result<Vec<u8>> {
    if buf.is_empty() && original_size == 0 {
        return Ok(vec![]);
    }
    if buf.is_empty() {
        return Err(crate::Error::EmptyInput);
    }
    if original_size == 0 {
        return Err(crate::Error::ZeroSize);
    }
    decompress_exact(buf, original_size)
}

/// Reads the uncompressed size declared in the frame header without
/// decompressing.  `None` means the frame intentionally omits it.
///
/// # Errors
pub fn frame_content_size(buf: &[u8]) -> crate::Result<Option<u64>> {
    zstd::zstd_safe::get_frame_content_size(buf).map_err(|_| crate::Error::BadFrame)
}

/// # Errors
pub fn decompress_auto(buf: &[u8]) -> crate::Result<Vec<u8>> {
    if buf.is_empty() {
        return Ok(vec![]);
    }
    match frame_content_size(buf)? {
        Some(size) => {
            decompress_exact(buf, usize::try_from(size).map_err(|_| crate::Error::BadFrame)?)
        }
        None => {
            log::debug!("no content size in frame header, using streaming decompression");
            decompress_stream(buf)
        }
    }
}

fn decompress_exact(buf: &[u8], original_size: usize) -> crate::Result<Vec<u8>> {
    let mut dst = Vec::with_capacity(original_size);
    let n = zstd::zstd_safe::decompress(&mut dst, buf).map_err(to_codec_error)?;
    if n != original_size {
        return Err(crate::Error::SizeMismatch(n, original_size));
    }
    Ok(dst)
}

fn decompress_stream(buf: &[u8]) -> crate::Result<Vec<u8>> {
    let Some(mut dctx) = zstd::zstd_safe::DCtx::try_create() else {
        return Err(crate::Error::Codec("cannot allocate decompression context"));
    };
    dctx.init().map_err(to_codec_error)?;
    let mut dst = vec![];
    let mut scratch = vec![0; zstd::zstd_safe::DCtx::out_size()];
    let mut input = zstd::zstd_safe::InBuffer::around(buf);
    while input.pos < buf.len() {
        let mut output = zstd::zstd_safe::OutBuffer::around(&mut scratch[..]);
        let ret = dctx
            .decompress_stream(&mut output, &mut input)
            .map_err(to_codec_error)?;
        let n = output.pos();
        dst.extend_from_slice(&scratch[..n]);
        if ret == 0 {
            break; // frame complete
        }
    }
    Ok(dst)
}

fn to_codec_error(code: zstd::zstd_safe::ErrorCode) -> crate::Error {
    crate::Error::Codec(zstd::zstd_safe::get_error_name(code))
}
