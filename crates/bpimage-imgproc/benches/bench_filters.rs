use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bpimage_image::Image;
use bpimage_imgproc::{
    border::BorderMode,
    filter::{box_blur, convolve, emboss, kernels, Kernel},
};

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolve");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for radius in [1, 2, 4, 8].iter() {
            let kernel_size = 2 * radius + 1;
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            // input image
            let image_size = [*width, *height].into();
            let data = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
            let image = Image::<u8, 3>::new(image_size, data).unwrap();

            // output image
            let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

            // same weights with and without the 1D factors
            let separable = kernels::gaussian_kernel(*radius, 1.5).unwrap();
            let direct = Kernel::new(
                kernel_size,
                kernel_size,
                separable.as_slice().to_vec(),
            )
            .unwrap();

            group.bench_with_input(
                BenchmarkId::new("direct", &parameter_string),
                &(&image, &output, &direct),
                |b, i| {
                    let (src, mut dst, kernel) = (i.0, i.1.clone(), i.2);
                    b.iter(|| {
                        black_box(convolve(
                            src,
                            &mut dst,
                            kernel,
                            0.0,
                            BorderMode::Replicate,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("separable", &parameter_string),
                &(&image, &output, &separable),
                |b, i| {
                    let (src, mut dst, kernel) = (i.0, i.1.clone(), i.2);
                    b.iter(|| {
                        black_box(convolve(
                            src,
                            &mut dst,
                            kernel,
                            0.0,
                            BorderMode::Replicate,
                        ))
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("FilterPresets");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::from_size_val(image_size, 128).unwrap();
        let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("box_blur_3", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(box_blur(src, &mut dst, 3)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("emboss_2", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(emboss(src, &mut dst, kernels::EmbossDirection::Up, 2)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_convolve, bench_presets);
criterion_main!(benches);
