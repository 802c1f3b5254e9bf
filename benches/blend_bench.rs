use camrig::blend::BlendProfile;
use camrig::context::{FrameContext, TargetPose};
use camrig::director::CameraDirector;
use camrig::easing::BlendCurve;
use camrig::rig::CameraRig;
use camrig::stage::{AimStage, FollowSpace, FollowStage, NoiseStage};
use camrig::transform::{CameraTransform, LensSpace};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec3};

fn curve_benchmark(c: &mut Criterion) {
    let curve = BlendCurve::EaseInOut { exponent: 2.0 };
    let _ = c.bench_function("ease_in_out_evaluate", |b| {
        b.iter(|| black_box(curve.evaluate(black_box(0.5))))
    });
}

fn interpolate_benchmark(c: &mut Criterion) {
    let a = CameraTransform::new(Vec3::ZERO, Quat::IDENTITY).with_fov(60.0);
    let t = CameraTransform::new(
        Vec3::new(10.0, 5.0, -3.0),
        Quat::from_rotation_y(1.2),
    )
    .with_fov(90.0);
    let _ = c.bench_function("transform_interpolate", |b| {
        b.iter(|| {
            black_box(a.interpolate(
                black_box(&t),
                black_box(0.4),
                LensSpace::Linear,
            ))
        })
    });
}

fn director_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("director_tick");

    for count in [1usize, 8, 32].iter() {
        let mut director = CameraDirector::new();
        for i in 0..*count {
            let _ = director.register(
                CameraRig::new()
                    .with_priority(i as i32)
                    .with_blend(BlendProfile::new(0.5))
                    .with_stage(
                        FollowStage::new(
                            Vec3::new(0.0, 2.0, 6.0),
                            FollowSpace::Local,
                        )
                        .with_frequency(2.0),
                    )
                    .with_stage(AimStage::new())
                    .with_stage(NoiseStage::new(
                        i as u64,
                        Vec3::splat(0.05),
                        Vec3::splat(0.005),
                        9.0,
                    )),
            );
        }
        let ctx = FrameContext::new(1.0 / 60.0)
            .with_follow(TargetPose::at(Vec3::new(3.0, 0.0, -4.0)))
            .with_aim(TargetPose::at(Vec3::new(3.0, 1.0, -4.0)));

        let _ = group.bench_function(format!("{count}_cameras"), |b| {
            b.iter(|| black_box(director.tick(black_box(&ctx))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    curve_benchmark,
    interpolate_benchmark,
    director_tick_benchmark
);
criterion_main!(benches);
