fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(unplug_lib::run());

    // Don't wait on tasks still parked on input or signals.
    runtime.shutdown_background();
    result
}
